//! Source location capture
//!
//! Every logging macro stitches a [`SourceLocation`] into the call at the
//! call expression, so callers never pass file/line/function explicitly.
//! `function` holds the fully qualified path of the enclosing function (as
//! produced by the macros' `type_name` probe); sinks receive the bare name
//! for display compatibility with classic `__FUNCTION__`-style log lines.

/// Where in the program text a logging call appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    /// Fully qualified path of the enclosing function.
    pub function: &'static str,
}

impl SourceLocation {
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Bare name of the enclosing function, derived from the full path.
    pub fn function_name(&self) -> &'static str {
        extract_function_name(self.function)
    }
}

/// Extract a bare function name from a qualified signature.
///
/// Takes the substring between the last scope separator before the parameter
/// list and the parameter list's opening parenthesis. Signatures without a
/// parenthesis (Rust paths) are treated as ending at the end of the string.
///
/// ```
/// use fmt_logger::core::extract_function_name;
///
/// assert_eq!(extract_function_name("my_crate::server::handle"), "handle");
/// assert_eq!(extract_function_name("void ns::Node::tick(int)"), "tick");
/// assert_eq!(extract_function_name("main"), "main");
/// ```
pub fn extract_function_name(signature: &str) -> &str {
    let head = match signature.find('(') {
        Some(parenthesis) => &signature[..parenthesis],
        None => signature,
    };
    match head.rfind("::") {
        Some(last_colon) => &head[last_colon + 2..],
        None => head,
    }
}
