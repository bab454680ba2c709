/// Delimiters considered when sniffing a sheet, in tie-break order
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

const SAMPLE_LINES: usize = 20;

/// Detect the field delimiter of delimited text
///
/// A candidate qualifies when it appears in the header and splits every
/// sampled line into the same number of fields. Among qualifying candidates
/// the one producing the most fields wins. Falls back to the candidate most
/// frequent in the header, then to `,`.
pub fn detect_delimiter(text: &str) -> u8 {
    let sample: Vec<&str> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let Some(header) = sample.first() else {
        return b',';
    };

    let mut best: Option<(u8, usize)> = None;
    for &delimiter in &CANDIDATE_DELIMITERS {
        let header_count = count_unquoted(header, delimiter);
        if header_count == 0 {
            continue;
        }

        let consistent = sample
            .iter()
            .all(|line| count_unquoted(line, delimiter) == header_count);
        if consistent && best.is_none_or(|(_, count)| header_count > count) {
            best = Some((delimiter, header_count));
        }
    }

    if let Some((delimiter, _)) = best {
        return delimiter;
    }

    CANDIDATE_DELIMITERS
        .iter()
        .map(|&delimiter| (delimiter, count_unquoted(header, delimiter)))
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(_, count)| *count)
        .map(|(delimiter, _)| delimiter)
        .unwrap_or(b',')
}

/// Count delimiter occurrences outside double-quoted regions
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;

    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_comma() {
        let text = "batch_id,item_id,value\nA,1,1.0\nA,2,2.0\n";
        assert_eq!(detect_delimiter(text), b',');
    }

    #[test]
    fn detects_semicolon_with_decimal_commas_in_quotes() {
        let text = "batch_id;item_id;value\nA;1;\"1,5\"\nA;2;\"2,0\"\n";
        assert_eq!(detect_delimiter(text), b';');
    }

    #[test]
    fn detects_tab() {
        let text = "batch_id\titem_id\tnote\nA\t1\thello, world\n";
        assert_eq!(detect_delimiter(text), b'\t');
    }

    #[test]
    fn detects_pipe() {
        let text = "a|b|c\r\n1|2|3\r\n";
        assert_eq!(detect_delimiter(text), b'|');
    }

    #[test]
    fn prefers_consistent_candidate_over_frequent_one() {
        // Commas are more frequent in the header but do not split rows evenly
        let text = "a,b,c;d\n1,2;3\nx;y\n";
        assert_eq!(detect_delimiter(text), b';');
    }

    #[test]
    fn ignores_delimiters_inside_quotes() {
        assert_eq!(count_unquoted("\"a,b\",c", b','), 1);
    }

    #[test]
    fn falls_back_to_comma() {
        assert_eq!(detect_delimiter(""), b',');
        assert_eq!(detect_delimiter("single_column\nvalue\n"), b',');
    }

    #[test]
    fn falls_back_to_most_frequent_in_header_when_ragged() {
        let text = "a;b;c\n1;2\n";
        assert_eq!(detect_delimiter(text), b';');
    }
}
