use mdsite::{Error, HtmlNode, markdown_to_html, parse_markdown};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(
    "# Title\n\nSome **bold** text.",
    "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>"
)]
#[case("- a\n- b", "<div><ul><li>a</li><li>b</li></ul></div>")]
#[case("1. first\n2. second", "<div><ol><li>first</li><li>second</li></ol></div>")]
#[case("> *quote*", "<div><blockquote><i>quote</i></blockquote></div>")]
#[case("```\n# not a heading\n```", "<div><pre><code># not a heading</code></pre></div>")]
#[case(
    "See [docs](https://docs.rs) and ![logo](logo.png)",
    r#"<div><p>See <a href="https://docs.rs">docs</a> and <img src="logo.png" alt="logo" /></p></div>"#
)]
fn converts_documents(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(markdown_to_html(markdown).unwrap(), expected);
}

#[test]
fn full_document() {
    let markdown = r#"
        # Tolkien Fan Club

        **I like Tolkien**. Read my [first post here](/majesty)

        > All that is gold does not glitter

        ## Reasons I like Tolkien

        * You can spend years studying the legendarium
        * It's a `fantasy` classic

        1. Gandalf
        2. Bilbo

        ```
        func main(){
            fmt.Println("Hello, World!")
        }
        ```
    "#;

    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        r#"<p><b>I like Tolkien</b>. Read my <a href="/majesty">first post here</a></p>"#,
        "<blockquote>All that is gold does not glitter</blockquote>",
        "<h2>Reasons I like Tolkien</h2>",
        "<ul><li>You can spend years studying the legendarium</li><li>It's a <code>fantasy</code> classic</li></ul>",
        "<ol><li>Gandalf</li><li>Bilbo</li></ol>",
        "<pre><code>func main(){\n    fmt.Println(\"Hello, World!\")\n}</code></pre>",
        "</div>",
    );

    assert_eq!(markdown_to_html(markdown).unwrap(), expected);
}

#[test]
fn unbalanced_delimiter_fails_the_whole_document() {
    let err = parse_markdown("# Fine\n\nnot *fine").unwrap_err();
    match &err {
        Error::Block { block, .. } => assert_eq!(block, "not *fine"),
        other => panic!("expected block error, got {other:?}"),
    }
    assert_eq!(
        err.root(),
        &Error::UnbalancedDelimiter {
            text: "not *fine".to_string(),
            delimiter: "*".to_string(),
        }
    );
}

#[test]
fn rendering_twice_is_identical() {
    let root = parse_markdown("# a\n\n- b\n\n```\nc\n```").unwrap();
    assert_eq!(root.render(), root.render());
}

#[test]
fn root_is_a_div() {
    let root = parse_markdown("text").unwrap();
    assert!(matches!(root, HtmlNode::Parent(_)));
    assert_eq!(root.tag(), Some("div"));
}
