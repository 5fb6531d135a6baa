//! Accessibility adjustments: reduced motion and external link hardening.

use folio_core::MotionPreference;

/// Timing overrides applied to every animation when motion is reduced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOverrides {
    pub animation_duration_ms: f32,
    pub animation_iterations: u32,
    pub transition_duration_ms: f32,
    pub smooth_scroll: bool,
}

/// Overrides for `preference`, `None` when motion is not reduced.
pub fn motion_overrides(preference: MotionPreference) -> Option<MotionOverrides> {
    preference.is_reduced().then_some(MotionOverrides {
        animation_duration_ms: 0.01,
        animation_iterations: 1,
        transition_duration_ms: 0.01,
        smooth_scroll: false,
    })
}

/// Effective duration of an animation under `preference`.
pub fn animation_duration_ms(preference: MotionPreference, duration_ms: u64) -> u64 {
    match motion_overrides(preference) {
        Some(_) => 0,
        None => duration_ms,
    }
}

/// Attributes added to links that leave the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkAttrs {
    pub target: &'static str,
    pub rel: &'static str,
}

/// Attributes for an external link, `None` for anything that stays on the
/// page's host or is not an `http` link.
///
/// A link counts as internal when its host contains `page_host`, so an empty
/// page host (a page opened from disk) marks every link internal.
pub fn external_link(href: &str, page_host: &str) -> Option<LinkAttrs> {
    if !href.starts_with("http") {
        return None;
    }
    let host = hostname(href)?;
    if host.contains(page_host) {
        return None;
    }
    Some(LinkAttrs {
        target: "_blank",
        rel: "noopener noreferrer",
    })
}

/// Host part of an absolute URL, without credentials or port.
pub fn hostname(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = match host.rsplit_once(':') {
        Some((h, port)) if port.chars().all(|c| c.is_ascii_digit()) => h,
        _ => host,
    };
    (!host.is_empty()).then_some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_overrides() {
        assert_eq!(motion_overrides(MotionPreference::NoPreference), None);
        let o = motion_overrides(MotionPreference::Reduce).unwrap();
        assert_eq!(o.animation_iterations, 1);
        assert!(!o.smooth_scroll);
        assert_eq!(animation_duration_ms(MotionPreference::Reduce, 2000), 0);
        assert_eq!(animation_duration_ms(MotionPreference::NoPreference, 2000), 2000);
    }

    #[test]
    fn test_hostname() {
        assert_eq!(hostname("https://github.com/user"), Some("github.com"));
        assert_eq!(hostname("http://me:pw@example.com:8080/x?q"), Some("example.com"));
        assert_eq!(hostname("https://example.com#top"), Some("example.com"));
        assert_eq!(hostname("mailto:me@example.com"), None);
        assert_eq!(hostname("https:///path"), None);
    }

    #[test]
    fn test_external_link() {
        let attrs = external_link("https://github.com/me", "me.dev").unwrap();
        assert_eq!(attrs.target, "_blank");
        assert_eq!(attrs.rel, "noopener noreferrer");
        assert_eq!(external_link("https://blog.me.dev/post", "me.dev"), None);
        assert_eq!(external_link("#contact", "me.dev"), None);
        assert_eq!(external_link("mailto:me@me.dev", "me.dev"), None);
        assert_eq!(external_link("https://github.com/me", ""), None);
    }
}
