/// Drops every character the PDF core fonts cannot encode (anything past
/// U+00FF). Lossy and silent.
pub fn to_latin1_lossy(text: &str) -> String {
    text.chars().filter(|ch| u32::from(*ch) <= 0xFF).collect()
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Existing line breaks are kept; words longer than `width` are split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split(' ') {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_len == 0 { word.len() } else { word.len() + 1 };
            if line_len > 0 && line_len + needed > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        lines.push(line);
    }

    lines
}
