use std::num::ParseIntError;
use std::path::Path;

macro_rules! make_log_macro {
    (@wdoll $macro_name:ident, $block_name:literal, ($dol:tt)) => {
        #[allow(dead_code)]
        macro_rules! $macro_name {
            ($dol($args:tt)+) => {
                ::log::$macro_name!(target: $block_name, $dol($args)+);
            };
        }
    };
    ($macro_name:ident, $block_name:literal) => {
        make_log_macro!(@wdoll $macro_name, $block_name, ($));
    };
}

pub fn read_file(path: impl AsRef<Path>) -> std::io::Result<String> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.trim_end().to_string())
}

/// Parse the first integer in `content`, scanning past leading whitespace
/// and stopping at the first non-digit. Device files end in a newline, and
/// values we wrote ourselves end in a NUL byte; neither reaches the parser.
pub fn leading_u32(content: &str) -> Result<u32, ParseIntError> {
    let digits: String = content
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse()
}
