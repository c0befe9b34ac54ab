//! Social share links for a summary.

use orcamento_shared::config::ShareConfig;
use serde::Serialize;

use super::document::SummaryDocument;

/// The four share targets offered next to a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    /// Messaging deep link carrying the summary text.
    pub whatsapp: String,
    /// `mailto:` link with subject and summary body.
    pub email: String,
    /// Static Discord link.
    pub discord: String,
    /// Static Instagram link.
    pub instagram: String,
}

impl ShareLinks {
    /// Builds the links for a document.
    #[must_use]
    pub fn new(doc: &SummaryDocument, config: &ShareConfig) -> Self {
        let text = urlencoding::encode(&doc.share_text()).into_owned();
        let subject = urlencoding::encode(&config.email_subject);

        Self {
            whatsapp: format!("{}{text}", config.whatsapp_url),
            email: format!("mailto:?subject={subject}&body={text}"),
            discord: config.discord_url.clone(),
            instagram: config.instagram_url.clone(),
        }
    }
}
