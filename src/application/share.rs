//! Social share affordances for an article page.

use url::form_urlencoded::byte_serialize;

use crate::presentation::views::{ShareLinkView, ShareView};

/// Build share links for the page at `url` titled `title`.
pub fn share_view(url: &str, title: &str) -> ShareView {
    let encoded_url = encode(url);
    let encoded_title = encode(title);

    let links = vec![
        ShareLinkView {
            network: "x",
            label: "X",
            href: format!(
                "https://twitter.com/intent/tweet?url={encoded_url}&text={encoded_title}"
            ),
        },
        ShareLinkView {
            network: "facebook",
            label: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={encoded_url}"),
        },
        ShareLinkView {
            network: "linkedin",
            label: "LinkedIn",
            href: format!("https://www.linkedin.com/sharing/share-offsite/?url={encoded_url}"),
        },
        ShareLinkView {
            network: "whatsapp",
            label: "WhatsApp",
            href: format!("https://wa.me/?text={}", encode(&format!("{title} {url}"))),
        },
    ];

    ShareView {
        url: url.to_string(),
        title: title.to_string(),
        links,
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
