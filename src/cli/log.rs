#[macro_export]
macro_rules! debug {
    ($options:expr, $console:expr, $template:literal $(, $value:expr)*) => {
        if $options.debug {
            $crate::log!($console, $template $(, $value)*);
        }
    };
}

#[macro_export]
macro_rules! log {
    ($console:expr, $template:literal $(, $value:expr)*) => {
        writeln!($console, "ltree: {}", format!($template $(, $value)*))?;
    };
}
