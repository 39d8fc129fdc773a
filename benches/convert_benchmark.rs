//! Benchmarks for htmltomd conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks convert synthetic documents of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use htmltomd::{ConvertOptions, Dialect, DocumentConverter, Html, OutputStyle};

/// Creates a synthetic HTML page with the given number of sections.
fn create_test_html(section_count: usize) -> String {
    let mut html = String::from("<html><head><title>Benchmark</title></head><body>");

    for i in 0..section_count {
        html.push_str(&format!(
            "<h2>Section {i}</h2>\
             <p>Paragraph with <strong>bold</strong>, <em>italic</em>, \
             <a href=\"https://example.com/{i}\">a link</a> and <code>code()</code>.</p>\
             <div><p>Nested \u{201C}quoted\u{201D} text</p><img src=\"img{i}.png\" alt=\"Image {i}\"></div>\
             <ul><li>One</li><li>Two</li><li>Three</li></ul>\
             <table><thead><tr><th>Key</th><th>Value</th></tr></thead>\
             <tbody><tr><td>k{i}</td><td>v{i}</td></tr></tbody></table>\
             <hr>"
        ));
    }

    html.push_str("</body></html>");
    html
}

/// Creates a synthetic Confluence export with panels and code blocks.
fn create_confluence_html(section_count: usize) -> String {
    let mut html = String::from(
        "<html><body><span id=\"title-text\">Benchmark</span><div id=\"main-content\">",
    );

    for i in 0..section_count {
        html.push_str(&format!(
            "<h2>Section {i}</h2>\
             <div class=\"confluence-information-macro confluence-information-macro-tip\">\
             <div class=\"confluence-information-macro-body\"><p>Tip {i}</p></div></div>\
             <div class=\"code\"><div><pre data-syntaxhighlighter-params=\"brush: rust; gutter: false\">\
             fn main() {{\n    println!(\"{i}\");\n}}</pre></div></div>"
        ));
    }

    html.push_str("</div></body></html>");
    html
}

/// Benchmark HTML parsing alone.
fn bench_parsing(c: &mut Criterion) {
    let html = create_test_html(50);

    c.bench_function("parse_50_sections", |b| {
        b.iter(|| Html::parse(black_box(&html)));
    });
}

/// Benchmark conversion of an already parsed document at various sizes.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_conversion");
    let converter = DocumentConverter::default();

    for section_count in [1, 10, 100].iter() {
        let html = Html::parse(&create_test_html(*section_count));

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| converter.convert(black_box(&html)));
        });
    }

    group.finish();
}

/// Benchmark the Confluence dialect with hugo output.
fn bench_confluence(c: &mut Criterion) {
    let options = ConvertOptions::new()
        .with_dialect(Dialect::Confluence)
        .with_output_style(OutputStyle::Hugo);
    let converter = DocumentConverter::from_options(&options);
    let html = Html::parse(&create_confluence_html(50));

    c.bench_function("confluence_50_sections", |b| {
        b.iter(|| converter.convert(black_box(&html)));
    });
}

criterion_group!(benches, bench_parsing, bench_conversion, bench_confluence);
criterion_main!(benches);
