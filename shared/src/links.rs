//! CMS-driven dynamic links
//!
//! Storefront contact and social links maintained in the CMS and fetched
//! from the content service. They change rarely, so consumers go through
//! the `billing-engine` links cache instead of fetching per render.

use serde::{Deserialize, Serialize};

/// Dynamic links record as served by the content service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreLinks {
    /// WhatsApp contact number for the chat widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    /// Instagram profile URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    /// Facebook page URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    /// Support mailbox shown in the footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
}
