//! UI strings. Summaries are bilingual data; the chrome around them is
//! Chinese.

pub mod zh_cn;

pub use zh_cn as current;

/// Substitute the first `{}` of `template`.
pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

/// Substitute the first two `{}` of `template`, in order.
pub fn fill_two(
    template: &str,
    first: impl std::fmt::Display,
    second: impl std::fmt::Display,
) -> String {
    fill_one(&fill_one(template, first), second)
}
