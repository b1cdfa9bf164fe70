/// Event names delivered by the vendor's webhook. Only the two
/// document-completion events trigger a download; everything else is
/// acknowledged and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEventName {
    VerificationSucceeded,
    ClassificationSucceeded,
    Other(String),
}

impl WebhookEventName {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "document.verification_succeeded" => WebhookEventName::VerificationSucceeded,
            "document.classification_succeeded" => WebhookEventName::ClassificationSucceeded,
            other => WebhookEventName::Other(other.to_string()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, WebhookEventName::Other(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_events_are_accepted() {
        assert!(WebhookEventName::parse("document.verification_succeeded").is_accepted());
        assert!(WebhookEventName::parse("document.classification_succeeded").is_accepted());
    }

    #[test]
    fn other_events_are_not_accepted() {
        let event = WebhookEventName::parse("document.uploaded");
        assert_eq!(event, WebhookEventName::Other("document.uploaded".to_string()));
        assert!(!event.is_accepted());
    }
}
