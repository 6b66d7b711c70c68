use console::Style;
use turbid_core::io::pairing::{ImagePair, Pairing};
use turbid_core::pipeline::config::{BatchConfig, RestorationParameters};
use turbid_core::pipeline::PairReport;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

/// `"inf"` for identical images, otherwise two decimals.
pub fn format_psnr(db: f64) -> String {
    if db.is_infinite() {
        "inf".to_string()
    } else {
        format!("{db:.2} dB")
    }
}

pub fn print_parameter_summary(params: &RestorationParameters) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Turbid Restoration"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();
    print_parameters(&s, params);
}

fn print_parameters(s: &Styles, params: &RestorationParameters) {
    println!("  {}", s.header.apply_to("Degradation"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Model"),
        s.method.apply_to("exp(-k (u\u{b2}+v\u{b2})^(5/6))")
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("k"),
        s.value.apply_to(format!("{:.6}", params.k))
    );
    println!();

    println!("  {}", s.header.apply_to("Inverse Filter"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Cutoff"),
        s.value.apply_to(format!("{:.1}", params.inverse_cutoff_radius))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Epsilon"),
        s.value.apply_to(format!("{:.2e}", params.inverse_epsilon))
    );
    println!();

    println!("  {}", s.header.apply_to("Wiener Filter"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Noise var"),
        s.value.apply_to(format!("{:.1}", params.noise_variance))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Signal var"),
        s.value.apply_to(params.signal_variance)
    );
    println!();
}

pub fn print_batch_header(config: &BatchConfig, image_count: usize, pairing: &Pairing) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Turbid Batch"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(image_count)
    );
    println!(
        "  {:<14}{} ({})",
        s.label.apply_to("Pairs"),
        s.value.apply_to(pairing.pairs.len()),
        s.method.apply_to(pairing.strategy)
    );
    println!();
    print_parameters(&s, &config.restoration);
}

pub fn print_pair_report(name: &str, report: &PairReport) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to(name));
    println!(
        "    {:<14}{}",
        s.label.apply_to("PSNR inverse"),
        s.value.apply_to(format_psnr(report.psnr_inverse))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("PSNR Wiener"),
        s.value.apply_to(format_psnr(report.psnr_wiener))
    );
    println!("    {:<14}{}", s.label.apply_to("Intensity"), report.stats);
    println!();
}

pub fn print_batch_table(rows: &[(ImagePair, PairReport)]) {
    println!();
    println!(
        "{:<28}  {:<28}  {:>12}  {:>12}",
        "Original", "Degraded", "PSNR inv", "PSNR wien"
    );
    println!("{}", "-".repeat(86));
    for (pair, report) in rows {
        println!(
            "{:<28}  {:<28}  {:>12}  {:>12}",
            pair.original,
            pair.degraded,
            format_psnr(report.psnr_inverse),
            format_psnr(report.psnr_wiener)
        );
    }
}
