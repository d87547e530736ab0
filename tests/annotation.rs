use aozora_rubifier::rubifier::{
    annotation::{Annotation, AnnotationMethod},
    diagnostic::Diagnostic,
    parse,
};

fn strings(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse() {
    assert_eq!(
        parse("に.ほん.ご"),
        (AnnotationMethod::Mono, strings(&["に", "ほん", "ご"]))
    );

    // 最初の区切り文字で決まる
    assert_eq!(
        parse("に,ほん.ご"),
        (AnnotationMethod::Jukugo, strings(&["に", "ほん", "ご"]))
    );

    assert_eq!(
        parse("にほんご"),
        (AnnotationMethod::Group, strings(&["にほんご"]))
    );
}

#[test]
fn test_parse_delimiter_runs() {
    assert_eq!(
        parse("a,,b"),
        (AnnotationMethod::Jukugo, strings(&["a", "b"]))
    );
    assert_eq!(
        parse(".に..ほん"),
        (AnnotationMethod::Mono, strings(&["に", "ほん"]))
    );
    assert_eq!(parse("にほんご."), (AnnotationMethod::Group, strings(&["にほんご"])));
}

#[test]
fn test_parse_invalid() {
    assert_eq!(parse(""), (AnnotationMethod::Invalid, vec![]));
    assert_eq!(parse(",,,"), (AnnotationMethod::Invalid, vec![]));
    assert_eq!(parse(".,."), (AnnotationMethod::Invalid, vec![]));
}

#[test]
fn test_parse_or_group() {
    let (annotation, diagnostic) = Annotation::parse_or_group("に.ほん");
    assert_eq!(annotation.method, AnnotationMethod::Mono);
    assert_eq!(diagnostic, None);

    let (annotation, diagnostic) = Annotation::parse_or_group(",,");
    assert_eq!(annotation, Annotation::group(",,"));
    assert_eq!(
        diagnostic,
        Some(Diagnostic::ParseFailure {
            text: ",,".to_owned()
        })
    );
}

#[test]
fn test_method_names() {
    assert_eq!(AnnotationMethod::Mono.to_string(), "Mono-ruby");
    assert_eq!(AnnotationMethod::Jukugo.to_string(), "Jukugo-ruby");
    assert_eq!(AnnotationMethod::Group.to_string(), "Group-ruby");
    assert!(!AnnotationMethod::Invalid.is_valid());
}
