use super::super::{ArgumentOwner, ArgumentsValidator, ValidationContext};
use crate::{ast::*, visit::*};

/// Validate that every argument that's passed to a field or directive is declared by the field's
/// or directive's definition.
///
/// Argument names are matched exactly. An undeclared argument is skipped over together with any
/// values inside it.
///
/// See [`ArgumentsValidator`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Names)
#[derive(Default)]
pub struct ArgumentsAreDefined;

impl<'a> ArgumentsValidator<'a> for ArgumentsAreDefined {
    fn validate_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        owner: ArgumentOwner<'a>,
        argument: &'a Argument<'a>,
    ) -> VisitFlow {
        if owner.get_argument(argument.name).is_some() {
            VisitFlow::Next
        } else {
            ctx.add_error(
                format!("{} doesn't accept argument '{}'", owner, argument.name),
                NodeRef::Argument(argument),
            );
            VisitFlow::Skip
        }
    }
}
