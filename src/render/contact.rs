use crate::models::Contact;
use serde::Serialize;
use std::fmt;

/// Country calling code used for messaging links
const COUNTRY_CODE: &str = "967";

/// Something the viewer can do to reach the advertiser.
/// Launching it belongs to whoever shows the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactAction {
    Call { uri: String },
    WhatsApp { uri: String },
}

impl ContactAction {
    pub fn call(phone: &str) -> Self {
        ContactAction::Call {
            uri: format!("tel:{}", phone),
        }
    }

    pub fn whatsapp(phone: &str) -> Self {
        let local = phone.strip_prefix('0').unwrap_or(phone);
        ContactAction::WhatsApp {
            uri: format!("https://wa.me/{}{}", COUNTRY_CODE, local),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactAction::Call { .. } => "اتصال",
            ContactAction::WhatsApp { .. } => "واتساب",
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            ContactAction::Call { uri } | ContactAction::WhatsApp { uri } => uri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub actions: Vec<ContactAction>,
}

impl From<&Contact> for ContactCard {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            role: contact.role.label().to_string(),
            phone: contact.phone.clone(),
            actions: vec![
                ContactAction::call(&contact.phone),
                ContactAction::whatsapp(&contact.phone),
            ],
        }
    }
}

impl fmt::Display for ContactCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "معلومات التواصل: {} ({})", self.name, self.role)?;
        writeln!(f, "📞 {}", self.phone)?;
        for action in &self.actions {
            writeln!(f, "  {}: {}", action.label(), action.uri())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactRole, Term};

    fn contact(phone: &str) -> Contact {
        Contact {
            name: "علي سعيد".to_string(),
            phone: phone.to_string(),
            role: Term::Known(ContactRole::Broker),
        }
    }

    #[test]
    fn test_actions_for_mobile_number() {
        let card = ContactCard::from(&contact("774567890"));
        assert_eq!(card.role, "دلال");
        assert_eq!(card.actions[0].uri(), "tel:774567890");
        assert_eq!(card.actions[1].uri(), "https://wa.me/967774567890");
    }

    #[test]
    fn test_whatsapp_drops_one_leading_zero() {
        assert_eq!(
            ContactAction::whatsapp("01234567").uri(),
            "https://wa.me/9671234567"
        );
        assert_eq!(ContactAction::whatsapp("001").uri(), "https://wa.me/96701");
    }
}
