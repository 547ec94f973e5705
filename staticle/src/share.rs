//! Share intent URLs for the static share buttons
//!
//! Builds the same intent URLs the share buttons open: Twitter and
//! WhatsApp take the share text plus the page URL, LinkedIn takes the
//! page URL only. All parameters are percent-encoded by the URL
//! builder.

use url::Url;

/// Twitter/X tweet intent with the page URL and share text
pub fn twitter_url(page_url: &str, text: &str) -> String {
    let mut url = Url::parse("https://twitter.com/intent/tweet").expect("static base URL");
    url.query_pairs_mut()
        .append_pair("url", page_url)
        .append_pair("text", text);
    url.to_string()
}

/// LinkedIn offsite share with the page URL
pub fn linkedin_url(page_url: &str) -> String {
    let mut url =
        Url::parse("https://www.linkedin.com/sharing/share-offsite/").expect("static base URL");
    url.query_pairs_mut().append_pair("url", page_url);
    url.to_string()
}

/// WhatsApp share with the text and page URL folded into one message
pub fn whatsapp_url(page_url: &str, text: &str) -> String {
    let mut url = Url::parse("https://wa.me/").expect("static base URL");
    url.query_pairs_mut()
        .append_pair("text", &format!("{} {}", text, page_url));
    url.to_string()
}
