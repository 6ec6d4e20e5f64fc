mod arguments_are_defined;
mod directives_are_defined;
mod fields_are_defined_on_type;
mod known_fragment_names;
mod lone_anonymous_operation;
mod required_arguments_are_present;
mod unique_argument_names;
mod unique_operation_names;

pub use arguments_are_defined::*;
pub use directives_are_defined::*;
pub use fields_are_defined_on_type::*;
pub use known_fragment_names::*;
pub use lone_anonymous_operation::*;
pub use required_arguments_are_present::*;
pub use unique_argument_names::*;
pub use unique_operation_names::*;
