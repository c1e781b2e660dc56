use console::Style;

use cellview_core::request::SimulationRequest;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_request_summary(request: &SimulationRequest, endpoint: &str) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Cellview Request"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();
    println!("  {:<16}{}", s.label.apply_to("Endpoint"), s.path.apply_to(endpoint));
    for (key, value) in &request.fields {
        println!("  {:<16}{}", s.label.apply_to(key), s.value.apply_to(value));
    }
    println!();
}
