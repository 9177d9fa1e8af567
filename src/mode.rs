/// Text the status line is collecting from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Search,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::SaveAs => "Save as: ",
            PromptKind::Search => "Search: ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    Prompt(PromptKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_variants() {
        assert_eq!(Mode::default(), Mode::Edit);
        assert_ne!(Mode::Edit, Mode::Prompt(PromptKind::Search));
        assert_ne!(Mode::Prompt(PromptKind::SaveAs), Mode::Prompt(PromptKind::Search));
    }

    #[test]
    fn test_prompt_labels() {
        assert_eq!(PromptKind::SaveAs.label(), "Save as: ");
        assert_eq!(PromptKind::Search.label(), "Search: ");
    }
}
