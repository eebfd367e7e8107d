//! 纯文本排版工具
//!
//! 负责把输入文本拆分成原始行，并按固定列宽做贪心折行。
//! 折行行为与 Python `textwrap.wrap` 的默认参数保持一致，
//! 这样生成的样张与旧脚本的输出逐行对得上。

/// Tab 展开的列宽
pub const TAB_SIZE: usize = 8;

/// 默认折行列宽
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// 按 `\n` 拆分原始行
///
/// 不做 `\r\n` 归一化，`\r` 会保留在行尾。
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// 去掉首尾空白后为空的行视为空行
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// 贪心折行
///
/// - Tab 展开到 8 的倍数列，其余 ASCII 空白统一替换为空格
/// - 单词只在字母间的连字符后断开，破折号 `--` 单独成块
/// - 非首行的行首空白、每行的行尾空白都会被丢弃
/// - 超过列宽的单词会被截断以填满当前行
///
/// 长度按 Unicode 标量计数。全空白的行返回空列表。
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = split_chunks(&munge_whitespace(line));
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let mut cur_line: Vec<Vec<char>> = Vec::new();
        let mut cur_len = 0usize;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_space_chunk(c)) {
            chunks.pop();
        }

        while chunks.last().is_some_and(|c| cur_len + c.len() <= width) {
            if let Some(chunk) = chunks.pop() {
                cur_len += chunk.len();
                cur_line.push(chunk);
            }
        }

        if chunks.last().is_some_and(|c| c.len() > width) {
            break_long_chunk(&mut chunks, &mut cur_line, width - cur_len);
        }

        if cur_line.last().is_some_and(|c| is_space_chunk(c)) {
            cur_line.pop();
        }

        if !cur_line.is_empty() {
            lines.push(cur_line.concat().into_iter().collect());
        }
    }

    lines
}

fn is_wrap_space(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ' ')
}

fn is_space_chunk(chunk: &[char]) -> bool {
    chunk.iter().all(|&c| c == ' ')
}

/// 展开 Tab，并把其余空白字符替换为空格
fn munge_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0usize;

    for c in line.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c if is_wrap_space(c) => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }

    out
}

/// 拆成交替出现的单词块和空白块
fn split_chunks(text: &str) -> Vec<Vec<char>> {
    let mut chunks: Vec<Vec<char>> = Vec::new();
    let mut current: Vec<char> = Vec::new();
    let mut in_space = false;

    for c in text.chars() {
        let space = c == ' ';
        if !current.is_empty() && space != in_space {
            chunks.push(std::mem::take(&mut current));
        }
        in_space = space;
        current.push(c);
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
        .into_iter()
        .flat_map(|chunk| {
            if is_space_chunk(&chunk) {
                vec![chunk]
            } else {
                split_hyphenated(chunk)
            }
        })
        .collect()
}

/// 单词字符：字母、数字、下划线
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// 不含数字的单词字符
fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// 可以出现在破折号前面的字符
fn is_dash_lead(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

/// `k` 处的连字符之后能否断开
///
/// 前面是两个字母（`well-`）或 `a-b-` 形式，后面是字母，
/// 中间最多再隔一个连字符。数字和单个字母前的连字符不断开。
fn breaks_after_hyphen(word: &[char], k: usize) -> bool {
    let letter_at = |i: usize| word.get(i).is_some_and(|&c| is_letter(c));

    let before = (k >= 2 && letter_at(k - 2) && letter_at(k - 1))
        || (k >= 3 && letter_at(k - 3) && word[k - 2] == '-' && letter_at(k - 1));
    let after = letter_at(k + 1)
        && (letter_at(k + 2) || (word.get(k + 2) == Some(&'-') && letter_at(k + 3)));

    before && after
}

/// `k` 处开始的是否为两个以上连字符组成、后接单词字符的破折号，返回其结束位置
fn em_dash_end(word: &[char], k: usize) -> Option<usize> {
    let dashes = word[k..].iter().take_while(|&&c| c == '-').count();
    let end = k + dashes;
    (dashes >= 2 && word.get(end).is_some_and(|&c| is_word(c))).then_some(end)
}

/// 拆分单词中的断点
///
/// `well-known` -> `well-`, `known`；`foo--bar` -> `foo`, `--`, `bar`；
/// `x-ray`、`2023-10-05` 保持完整。
fn split_hyphenated(word: Vec<char>) -> Vec<Vec<char>> {
    let mut parts = Vec::new();
    let mut start = 0usize;

    while start < word.len() {
        if start > 0 && is_dash_lead(word[start - 1]) {
            if let Some(end) = em_dash_end(&word, start) {
                parts.push(word[start..end].to_vec());
                start = end;
                continue;
            }
        }

        let mut end = word.len();
        for k in start + 1..word.len() {
            if word[k] == '-' && breaks_after_hyphen(&word, k) {
                end = k + 1;
                break;
            }
            if is_dash_lead(word[k - 1]) && em_dash_end(&word, k).is_some() {
                end = k;
                break;
            }
        }
        parts.push(word[start..end].to_vec());
        start = end;
    }

    parts
}

/// 截断栈顶的超长块，前半段放进当前行
fn break_long_chunk(chunks: &mut [Vec<char>], cur_line: &mut Vec<Vec<char>>, space_left: usize) {
    let Some(chunk) = chunks.last_mut() else {
        return;
    };

    let mut end = space_left.min(chunk.len());
    if let Some(hyphen) = chunk[..end].iter().rposition(|&c| c == '-') {
        // 优先在连字符处断开，但不能只剩连字符
        if hyphen > 0 && chunk[..hyphen].iter().any(|&c| c != '-') {
            end = hyphen + 1;
        }
    }

    let rest = chunk.split_off(end);
    cur_line.push(std::mem::replace(chunk, rest));
}
