/// Cut `s` to at most `max_len` characters, marking the cut with "...".
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Left-align `s` in a column of `width` characters.
pub fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("Usuários", 20), "Usuários");
        assert_eq!(truncate("Configurações do sistema", 10), "Configu...");
        assert_eq!(truncate("abc", 2), "ab");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ID", 4), "ID  ");
        assert_eq!(pad("Equipes", 3), "Equipes");
    }
}
