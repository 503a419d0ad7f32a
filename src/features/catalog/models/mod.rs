mod permitted_option;

pub use permitted_option::PermittedOption;
