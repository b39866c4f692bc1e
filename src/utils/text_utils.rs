/// Group digits in thousands, e.g. `372150` -> `372,150`.
pub fn with_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Heavy horizontal rule used between report sections
pub fn banner_rule() -> String {
    "=".repeat(80)
}

/// Light rule used under table headers
pub fn table_rule() -> String {
    "-".repeat(80)
}
