// src/cli.rs
use std::{ env, error::Error, path::PathBuf };

use crate::{
    config::{
        options::{ AppOptions, ExportFormat, ReportVariant },
        state::AppState,
    },
    file,
    progress::Progress,
    report::{ table, Report },
    runner,
    specs::fields::ZeroPolicy,
};

#[derive(Clone, Debug, Default)]
pub struct CliArgs {
    pub input: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub options: AppOptions,
    pub help: bool,
}

/// Prints progress to stderr so stdout stays clean for the table.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(AppState::from_env().options, env::args().skip(1))?;
    if args.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let input = args.input.ok_or("Missing input file (see --help)")?;
    let report = runner::run(&input, &args.options, Some(&mut CliProgress))?;

    if args.out.is_some() {
        let path = file::write_export(&args.options.export, &report)?;
        logf!("CLI: exported {} row(s) → {}", report.rows.len(), path.display());
        println!("Wrote {}", path.display());
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Parse arguments on top of `options` (defaults + environment).
pub fn parse_args<I>(options: AppOptions, args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs { options, ..CliArgs::default() };
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--variant" => {
                let v = args.next().ok_or("Missing value for --variant")?;
                cli.options.report.variant = ReportVariant::parse(&v)
                    .ok_or_else(|| format!("Unknown variant: {}", v))?;
            }
            "--legacy-zero" => cli.options.report.zero_policy = ZeroPolicy::Falsy,
            "--target-url" => {
                cli.options.target.url = Some(args.next().ok_or("Missing value for --target-url")?);
            }
            "--no-target" => cli.options.target.url = None,
            "--multiplier" => {
                let v: f64 = args.next().ok_or("Missing value for --multiplier")?.parse()?;
                if !v.is_finite() || v < 0.0 {
                    return Err(format!("Invalid multiplier: {}", v).into());
                }
                cli.options.target.multiplier = v;
            }
            "--month" => {
                let v: u32 = args.next().ok_or("Missing value for --month")?.parse()?;
                if !(1..=12).contains(&v) { return Err("Month out of range (1..12)".into()); }
                cli.options.target.month = Some(v);
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                cli.options.export.set_path(&v);
                cli.out = Some(PathBuf::from(v));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                cli.options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;
            }
            "--no-headers" => cli.options.export.include_headers = false,
            "-h" | "--help" => cli.help = true,
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            path => {
                if cli.input.is_some() { return Err(format!("Unexpected extra input: {}", path).into()); }
                cli.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(cli)
}

/// Plain-text table plus a totals block.
pub fn render_text(report: &Report) -> String {
    let headers = table::headers(report.variant);
    let rows = table::rows(report);

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in &rows {
        for (w, c) in widths.iter_mut().zip(r) {
            *w = (*w).max(c.chars().count());
        }
    }

    let mut out = s!();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for r in &rows {
        push_line(&mut out, r, &widths);
    }

    out.push('\n');
    out.push_str("Totals\n");
    let totals = table::totals_cells(&report.totals, report.variant);
    let label_w = totals.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (label, value) in totals {
        out.push_str(&format!("  {:<label_w$}  {}\n", label, value));
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<w$}", c.as_ref(), w = *w))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}
