use crate::options::ApiOptions;

/// Rewrite a backend media URL to the same-origin proxy prefix.
///
/// `http://127.0.0.1:8000/media/panoramas/a.jpg` becomes
/// `/media/panoramas/a.jpg` when the origin is listed in
/// [`ApiOptions::media_origins`]. Other URLs are returned unchanged.
#[must_use]
pub fn proxied_media_url(url: &str, options: &ApiOptions) -> String {
    for origin in &options.media_origins {
        let origin = origin.trim_end_matches('/');
        if let Some(rest) = url.strip_prefix(origin) {
            if rest.is_empty() || rest.starts_with('/') {
                let prefix = options.media_proxy_prefix.trim_end_matches('/');
                return format!("{prefix}{rest}");
            }
        }
    }
    url.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_media_is_proxied() {
        let opts = ApiOptions::default();
        assert_eq!(
            proxied_media_url("http://127.0.0.1:8000/media/panoramas/a.jpg", &opts),
            "/media/panoramas/a.jpg"
        );
        assert_eq!(
            proxied_media_url("http://localhost:8000/media/thumbs/b.jpg", &opts),
            "/media/thumbs/b.jpg"
        );
    }

    #[test]
    fn foreign_and_relative_urls_unchanged() {
        let opts = ApiOptions::default();
        for url in [
            "https://cdn.example.org/media/a.jpg",
            "/media/a.jpg",
            "http://127.0.0.1:8000/mediafiles/a.jpg",
        ] {
            assert_eq!(proxied_media_url(url, &opts), url);
        }
    }

    #[test]
    fn custom_prefix() {
        let opts = ApiOptions {
            media_proxy_prefix: "/proxy/media/".into(),
            ..ApiOptions::default()
        };
        assert_eq!(
            proxied_media_url("http://127.0.0.1:8000/media/a.jpg", &opts),
            "/proxy/media/a.jpg"
        );
    }
}
