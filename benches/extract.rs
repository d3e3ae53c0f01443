// benches/extract.rs
use criterion::{ criterion_group, criterion_main, Criterion, black_box };

use jira_report::config::options::{ ReportOptions, ReportVariant };
use jira_report::{ report, specs };

/// A navigator export with `n` issue rows, alternating which field carries the estimate.
fn sample_doc(n: usize) -> String {
    let mut doc = String::from("<html><body><table id=\"issuetable\"><tbody>");
    for i in 0..n {
        let (a, b) = if i % 2 == 0 { (format!("{}", i % 13), String::new()) } else { (String::new(), format!("{}", i % 7)) };
        doc.push_str(&format!(
            r#"<tr id="issuerow{i}" class="issuerow" data-issuekey="WEB-{i}">
  <td class="issuekey"><a class="issue-link" href="https://acme.atlassian.net/browse/WEB-{i}">WEB-{i}</a></td>
  <td class="summary"><p>Issue {i} <a href="/browse/WEB-1">WEB-1</a> follow-up &amp; cleanup</p></td>
  <td class="assignee">User {u}</td>
  <td class="customfield_10028">{a}</td>
  <td class="customfield_10569">{b}</td>
  <td class="timeoriginalestimate">{secs}</td>
  <td class="timespent">{spent}</td>
  <td class="workratio">{ratio}%</td>
  <td class="status"><span class="jira-issue-status-lozenge">In Progress</span></td>
</tr>
"#,
            u = i % 9,
            secs = 3600 * (i % 5 + 1),
            spent = 1800 * (i % 4),
            ratio = (i * 7) % 120,
        ));
    }
    doc.push_str("</tbody></table></body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_doc(500);
    let sp = ReportOptions::default();
    let tt = ReportOptions { variant: ReportVariant::TimeTracking, ..ReportOptions::default() };

    c.bench_function("extract_rows_story_points", |b| {
        b.iter(|| {
            let rows = specs::issues::extract_rows(black_box(&doc), &sp);
            black_box(rows.len())
        })
    });

    c.bench_function("extract_rows_time_tracking", |b| {
        b.iter(|| {
            let rows = specs::issues::extract_rows(black_box(&doc), &tt);
            black_box(rows.len())
        })
    });

    c.bench_function("report_parse_with_target", |b| {
        b.iter(|| {
            let r = report::parse(black_box(&doc), &tt, Some(168.0));
            black_box(r.totals.total_estimate_hours)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
