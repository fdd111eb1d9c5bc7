/// Идентификатор цели внутристраничной ссылки.
///
/// `"#"` и ссылки не на фрагмент дают `None`: их обработка не перехватывается.
/// Фрагмент декодируется из percent-encoding.
pub fn fragment_target(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.trim().is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(fragment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    Some(decoded)
}

/// Позиция прокрутки к якорю с учётом фиксированной шапки и отступа.
pub fn anchor_scroll_top(target_top: f64, header_height: f64, margin: f64) -> f64 {
    (target_top - header_height - margin).max(0.0)
}
