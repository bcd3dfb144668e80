use address_recognizers::{attention_addressee, postal_code, AddressLines};
use recognizer_framework::{Input, Position, Primitives};

const HEADER: &str = "Some address somewhere\n3000 Some street\nEnglewood, CO\n55555\n";

fn blocks() -> Vec<(usize, usize, String)> {
    [
        (1, 1, "Attn:  Some Person\nPhone: 555-555-5555"),
        (1, 0, "Phone: +1 (555)-555-5555"),
        (0, 1, "Attn:  Some Person"),
        (0, 1, "Att:  Some Person"),
        (0, 1, "Attention:  Some Person"),
        (1, 0, "Fax:   +1 555-555-555 "),
        (2, 0, "Fax:   (555) 555-555 \nPhone:   555 555 555 "),
    ]
    .into_iter()
    .map(|(phones, attentions, tail)| (phones, attentions, format!("{HEADER}{tail}")))
    .collect()
}

#[test]
fn test_address_blocks() {
    for (phones, attentions, block) in blocks() {
        assert_eq!(block.lines().phone_lines().count(), phones, "{block}");
        assert_eq!(block.lines().attention_lines().count(), attentions, "{block}");
        let codes: Vec<&str> = block.lines().postal_code_lines().collect();
        assert_eq!(codes, ["55555"], "{block}");
    }
}

#[test]
fn test_crlf_lines() {
    let block = "Englewood, CO\r\n55555\r\nPhone: 555-555-5555\r\n";
    assert_eq!(block.lines().phone_lines().count(), 1);
    assert_eq!(block.lines().postal_code_lines().count(), 1);
}

#[test]
fn test_filters_preserve_order() {
    let block = "Phone: 555-555\nA1A 1A1\nFax: 555-556\n55555\nPhone 555 557";
    let phones: Vec<&str> = block.lines().phone_lines().collect();
    assert_eq!(phones, ["Phone: 555-555", "Fax: 555-556", "Phone 555 557"]);
    let codes: Vec<&str> = block.lines().postal_code_lines().collect();
    assert_eq!(codes, ["A1A 1A1", "55555"]);
}

#[test]
fn test_attention_addressees() {
    let block = "Attn:  Some Person\nAttention: Sales\n55555";
    let addressees: Vec<&str> = block
        .lines()
        .attention_lines()
        .filter_map(attention_addressee)
        .collect();
    assert_eq!(addressees, ["Some Person", "Sales"]);
}

#[test]
fn test_care_of_lines() {
    let block = "Jane Doe\nc/o John Smith\nC\\O Acme\n55555";
    assert_eq!(block.lines().care_of_lines().count(), 2);
}

#[test]
fn test_full_lines_with_custom_rule() {
    let block = "A1A 1A1\nA1A 1A1 \nA1A-1A1\n55555";
    let kept: Vec<&str> = block.lines().full_lines(postal_code).collect();
    assert_eq!(kept, ["A1A 1A1", "A1A 1A1 "]);

    let words = |input: &Input<'_>, pos: &mut Position| input.letters(pos);
    let kept: Vec<&str> = block.lines().prefixed_lines(words).collect();
    assert_eq!(kept, ["A1A 1A1", "A1A 1A1 ", "A1A-1A1"]);
}
