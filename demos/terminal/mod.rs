use leafscan::{CarouselDisplay, FactCarousel, ResultsDisplay, ResultsView};

/// Prints the results region to stdout.
#[derive(Default)]
pub struct TerminalDisplay {
    verbose: bool,
}

impl TerminalDisplay {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ResultsDisplay for TerminalDisplay {
    fn render(&mut self, view: &ResultsView) {
        if !view.visible && !self.verbose {
            return;
        }

        let fields = &view.fields;
        println!("----------------------------------------");
        println!("{} {}", fields.name, fields.scientific_name);
        println!("[{:>8}] {}", fields.confidence_width, fields.confidence_text);
        if !fields.description.is_empty() {
            println!("{}", fields.description);
        }
        if !fields.origin.is_empty() {
            println!("origin: {}", fields.origin);
        }
        if !fields.uses.is_empty() {
            println!("uses:   {}", fields.uses);
        }

        let detail = &fields.detail;
        if detail.visible {
            println!("family: {}", detail.family);
            if let Some(url) = &detail.image_url {
                println!("image:  {url}");
            }
        }
    }

    fn reveal(&mut self) {
        if self.verbose {
            println!("(preview ready)");
        }
    }
}

impl CarouselDisplay<&'static str> for TerminalDisplay {
    fn show(&mut self, carousel: &FactCarousel<&'static str>) {
        let dots: String = carousel
            .active_flags()
            .iter()
            .map(|active| if *active { '●' } else { '○' })
            .collect();
        println!("{dots}  {}", carousel.active_panel());
    }
}
