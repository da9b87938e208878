use raft_trim::reverse_complement;
use raft_trim::Adapters;

#[test]
fn test_reverse_complement_basic() {
    let input = b"ATGC";
    let expected = b"GCAT";
    assert_eq!(reverse_complement(input), expected);
}

#[test]
fn test_reverse_complement_lowercase() {
    // 小写字母会被转为大写
    assert_eq!(reverse_complement(b"atgc"), b"GCAT");
}

#[test]
fn test_reverse_complement_with_n() {
    // N 自身互补
    assert_eq!(reverse_complement(b"ATGCN"), b"NGCAT");
}

#[test]
fn test_reverse_complement_iupac() {
    assert_eq!(reverse_complement(b"RYKMBVDHSW"), b"WSDHBVKMRY");
}

#[test]
fn test_reverse_complement_unknown_bases() {
    // 非 IUPAC 字符转换为 N
    assert_eq!(reverse_complement(b"ATXGC"), b"GCNAT");
}

#[test]
fn test_reverse_complement_empty() {
    assert_eq!(reverse_complement(b""), b"");
}

#[test]
fn test_reverse_complement_twice_is_identity() {
    let input = b"ACGTRYKMBVDHSWNNACGT";
    assert_eq!(reverse_complement(&reverse_complement(input)), input.to_vec());
}

#[test]
fn test_reverse_complement_palindrome() {
    // Sau3AI 切点
    assert_eq!(reverse_complement(b"GATC"), b"GATC");
}

#[test]
fn test_default_adapter_reverse_complements() {
    let a = Adapters::default();
    assert_eq!(a.dsb_flank_rc, b"CCCCTGCA");
    assert_eq!(a.re_flank_rc, b"AAACGATC");
    assert_eq!(a.window, 30);
}
