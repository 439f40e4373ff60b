// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use case_scrape::extract::{classify, filed_case_links, latest_court_date};

/// A results page the size of a busy defendant's history.
fn sample_results(rows: usize) -> String {
    let mut html = String::from("<html><body><table>");
    for i in 0..rows {
        let status = if i % 3 == 0 { "Filed" } else { "Disposed" };
        html.push_str(&format!(
            "<tr><td><a href=\"CaseDetail.aspx?CaseID={i}\">20{:02}-CR-{i:04}</a></td>\
             <td><div>County Court at Law</div></td><td><div>{status}</div></td></tr>",
            i % 25
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn sample_detail(events: usize) -> String {
    let mut html = String::from("<html><body><table>");
    for i in 0..events {
        html.push_str(&format!(
            "<tr><th class=\"ssTableHeaderLabel\" valign=\"top\">{:02}/{:02}/20{:02}</th>\
             <td>Pretrial Hearing</td></tr>",
            i % 12 + 1,
            i % 28 + 1,
            i % 25
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let results = sample_results(60);
    let detail = sample_detail(120);

    c.bench_function("classify_results", |b| {
        b.iter(|| classify(black_box(&results)))
    });

    c.bench_function("filed_case_links", |b| {
        b.iter(|| {
            let links = filed_case_links(black_box(&results));
            black_box(links.len())
        })
    });

    c.bench_function("latest_court_date", |b| {
        b.iter(|| latest_court_date(black_box(&detail)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
