// src/macros.rs

/// String shorthand. `s!()` is an empty String, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-likes into a fresh String.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Format an optional value for display; `None` becomes an empty String.
#[macro_export]
macro_rules! opt_s {
    ($opt:expr) => {
        match $opt {
            Some(v) => v.to_string(),
            None => ::std::string::String::new(),
        }
    };
}
