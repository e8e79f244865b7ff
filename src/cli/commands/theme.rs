use crate::config::Config;
use crate::theme::{ThemeState, root_classes, toggle_dark_theme};

pub fn handle_toggle(dark: bool, config: &Config) -> anyhow::Result<()> {
    let before = if dark { ThemeState::dark() } else { config.theme };
    let after = toggle_dark_theme(before);

    println!("Before: {}", format_classes(&before));
    println!("After:  {}", format_classes(&after));
    Ok(())
}

fn format_classes(state: &ThemeState) -> String {
    let classes = root_classes(state);
    if classes.is_empty() {
        "(none)".to_string()
    } else {
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_classes_marks_empty_list() {
        assert_eq!(format_classes(&ThemeState::light()), "(none)");
        assert_eq!(format_classes(&ThemeState::dark()), "dark-theme");
    }
}
