//! Prompt helpers for the settings menu.
//!
//! All prompts follow the same rule: an empty answer keeps the current
//! value, an unparseable or out-of-bounds answer keeps the current value
//! with a note, and a closed stdin reads as `None` so callers can back out.

use std::io::{self, Write};

/// An enum that can be offered as a menu choice by its wire token.
pub trait MenuChoice: Copy + std::fmt::Display {
    fn token(&self) -> &'static str;
    fn from_token(token: &str) -> Option<Self>;
    fn all() -> &'static [Self];
}

macro_rules! impl_menu_choice {
    ($($ty:ty),+ $(,)?) => {
        $(impl MenuChoice for $ty {
            fn token(&self) -> &'static str {
                <$ty>::token(self)
            }
            fn from_token(token: &str) -> Option<Self> {
                <$ty>::from_token(token)
            }
            fn all() -> &'static [Self] {
                <$ty>::all()
            }
        })+
    };
}

impl_menu_choice!(
    fm_core::models::ImageLayout,
    fm_core::models::ResizeMode,
    fm_core::models::ImageFilter,
    fm_core::models::WatermarkPosition,
    fm_core::models::SeparatorStyle,
    fm_core::models::LogLevel,
);

/// Read one trimmed line from stdin. `None` means stdin is closed.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Interpret a yes/no answer.
pub fn parse_bool(input: &str) -> Option<bool> {
    match input.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Resolve a choice token, tolerating wrong case.
pub fn resolve_choice<T: MenuChoice>(input: &str) -> Option<T> {
    T::from_token(input)
        .or_else(|| T::from_token(&input.to_lowercase()))
        .or_else(|| T::from_token(&input.to_uppercase()))
}

/// Prompt for a yes/no value.
pub fn prompt_bool(label: &str, current: bool) -> bool {
    let hint = if current { "y" } else { "n" };
    let Some(answer) = read_line(&format!("{label} (y/n) [{hint}]: ")) else {
        return current;
    };
    if answer.is_empty() {
        return current;
    }
    match parse_bool(&answer) {
        Some(value) => value,
        None => {
            println!("Invalid input, keeping {hint}");
            current
        }
    }
}

/// Prompt for an integer within bounds.
pub fn prompt_int(label: &str, current: i64, min: i64, max: i64) -> i64 {
    let Some(answer) = read_line(&format!("{label} [{current}]: ")) else {
        return current;
    };
    if answer.is_empty() {
        return current;
    }
    match answer.parse::<i64>() {
        Ok(value) if (min..=max).contains(&value) => value,
        Ok(_) if max == i64::MAX => {
            println!("Must be at least {min}, keeping {current}");
            current
        }
        Ok(value) => {
            println!("{value} is out of range ({min}-{max}), keeping {current}");
            current
        }
        Err(_) => {
            println!("Invalid input, keeping {current}");
            current
        }
    }
}

/// Prompt for free text.
pub fn prompt_text(label: &str, current: &str) -> String {
    let Some(answer) = read_line(&format!("{label} [{current}]: ")) else {
        return current.to_string();
    };
    if answer.is_empty() {
        current.to_string()
    } else {
        answer
    }
}

/// Prompt for one of an enum's tokens. Invalid tokens keep the current
/// value, so a typo can never land in the record.
pub fn prompt_choice<T: MenuChoice + 'static>(label: &str, current: T) -> T {
    let options: Vec<&str> = T::all().iter().map(MenuChoice::token).collect();
    println!("Options: {}", options.join(", "));
    let Some(answer) = read_line(&format!("{label} [{current}]: ")) else {
        return current;
    };
    if answer.is_empty() {
        return current;
    }
    match resolve_choice(&answer) {
        Some(value) => value,
        None => {
            println!("Invalid option, keeping {current}");
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fm_core::models::{ImageLayout, LogLevel};

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("y"), Some(true));
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("n"), Some(false));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn resolve_choice_tolerates_case() {
        assert_eq!(resolve_choice::<ImageLayout>("grid"), Some(ImageLayout::Grid));
        assert_eq!(resolve_choice::<ImageLayout>("GRID"), Some(ImageLayout::Grid));
        assert_eq!(resolve_choice::<LogLevel>("debug"), Some(LogLevel::Debug));
        assert_eq!(resolve_choice::<ImageLayout>("diagonal"), None);
    }
}
