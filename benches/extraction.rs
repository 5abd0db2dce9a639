use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagefreq::{count_ngrams, extract_text, tokenize, Category, Report};
use scraper::Html;

// ---------------------------------------------------------------------------
// HTML fixtures
// ---------------------------------------------------------------------------

/// Small page: a handful of paragraphs + minimal nav/footer.
const SMALL_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Test</title></head>
<body>
<nav><a href="/">Home</a> | <a href="/about">About</a></nav>
<h1>Article Title</h1>
<p>This is the first paragraph of the main article content. It links to
<a href="/more">more reading</a> and repeats the words article and content.</p>
<p>The second paragraph continues the article with more substantive content.</p>
<footer><a href="/privacy">Privacy</a> | <a href="/terms">Terms</a> Copyright 2024</footer>
</body>
</html>"#;

/// Page with `n` content paragraphs and nav/aside/footer boilerplate.
fn page_html(n: usize) -> String {
    let mut s = String::from(
        "<!DOCTYPE html><html><head><title>Article</title></head><body>\n\
         <nav><a href=\"/\">Home</a><a href=\"/news\">News</a><a href=\"/sports\">Sports</a></nav>\n\
         <h1>Main Article Heading</h1>\n",
    );
    for i in 1..=n {
        s.push_str(&format!(
            "<p>Paragraph {} of the article body. It mentions <a href=\"/topic/{}\">topic {}</a> \
             and repeats garden tools, garden hoses and garden tools again so that phrase \
             counts have something to find.</p>\n",
            i, i, i
        ));
    }
    s.push_str(
        "<footer><p>Copyright 2024 Corp. <a href=\"/privacy\">Privacy</a></p></footer>\n\
         </body></html>",
    );
    s
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Full report at three page sizes.
fn bench_report(c: &mut Criterion) {
    let inputs: &[(&str, String)] = &[
        ("small", SMALL_HTML.to_string()),
        ("medium", page_html(20)),
        ("large", page_html(100)),
    ];

    let mut group = c.benchmark_group("report");
    for (id, html) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(id), html, |b, html| {
            b.iter(|| Report::from_html(black_box("https://example.com"), black_box(html)))
        });
    }
    group.finish();
}

/// Pipeline stages on an already parsed large page.
fn bench_stages(c: &mut Criterion) {
    let html = page_html(100);
    let doc = Html::parse_document(&html);
    let text = extract_text(&doc, None);
    let tokens = tokenize(&text);
    let footer = Category::FooterLinkedWords.selector();

    let mut group = c.benchmark_group("stages");
    group.bench_function("extract_all", |b| {
        b.iter(|| extract_text(black_box(&doc), None))
    });
    group.bench_function("extract_footer_linked", |b| {
        b.iter(|| extract_text(black_box(&doc), Some(black_box(&footer))))
    });
    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(&text))));
    for n in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("count_ngrams", n), &n, |b, &n| {
            b.iter(|| count_ngrams(black_box(&tokens), n))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_report, bench_stages);
criterion_main!(benches);
