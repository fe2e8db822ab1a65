//! Picker modal visibility.

/// What the user did to a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// The open trigger was pressed.
    Open,
    /// The close or apply button was pressed.
    Close,
    /// The backdrop was tapped.
    Dismiss,
    Toggle,
}

/// Visibility of one picker modal. The two catalogs each own an instance;
/// nothing keeps them mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalVisibility {
    visible: bool,
}

impl ModalVisibility {
    pub fn apply(self, action: ModalAction) -> Self {
        let visible = match action {
            ModalAction::Open => true,
            ModalAction::Close | ModalAction::Dismiss => false,
            ModalAction::Toggle => !self.visible,
        };
        Self { visible }
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_transitions() {
        let modal = ModalVisibility::default();
        assert!(!modal.is_visible());

        assert!(modal.apply(ModalAction::Open).is_visible());
        assert!(modal.apply(ModalAction::Toggle).is_visible());
        assert!(!modal.apply(ModalAction::Open).apply(ModalAction::Dismiss).is_visible());
        assert!(!modal.apply(ModalAction::Open).apply(ModalAction::Close).is_visible());
        assert!(!modal.apply(ModalAction::Toggle).apply(ModalAction::Toggle).is_visible());
    }
}
