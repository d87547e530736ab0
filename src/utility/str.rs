// "\x" を "x" に、"\\" を "\" にする
// 末尾に残った "\" は捨てる
pub fn unescape_backslashes(s: &str) -> String {
    let mut ret = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                ret.push(escaped);
            }
        } else {
            ret.push(c);
        }
    }
    ret
}
