//! Auflösung relativer Asset-Pfade gegen die konfigurierte Basis-URL.

/// Löst einen vom Dienst gelieferten Asset-Pfad in eine vollständige URL auf.
///
/// Absolute URLs und leere Pfade gehen unverändert durch. Wurzel-relative
/// Pfade (`/uploads/...`, `/agents/...`) werden mit der Basis-URL
/// zusammengesetzt, alles andere bleibt wie geliefert.
pub fn resolve_asset_url(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("file://") {
        return path.to_string();
    }

    if path.starts_with('/') {
        return format!("{}{}", base_url.trim_end_matches('/'), path);
    }

    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            resolve_asset_url("http://localhost:8000", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            resolve_asset_url("http://localhost:8000", "http://other/a.png"),
            "http://other/a.png"
        );
    }

    #[test]
    fn test_root_relative_paths_get_prefixed() {
        assert_eq!(
            resolve_asset_url("http://localhost:8000", "/uploads/0001_smoke.png"),
            "http://localhost:8000/uploads/0001_smoke.png"
        );
        // Doppelte Slashes beim Zusammensetzen vermeiden
        assert_eq!(
            resolve_asset_url("http://localhost:8000/", "/agents/sova.png"),
            "http://localhost:8000/agents/sova.png"
        );
    }

    #[test]
    fn test_empty_and_plain_paths() {
        assert_eq!(resolve_asset_url("http://localhost:8000", ""), "");
        assert_eq!(
            resolve_asset_url("http://localhost:8000", "relative/pfad.png"),
            "relative/pfad.png"
        );
    }
}
