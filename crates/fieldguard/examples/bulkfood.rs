//! Bulk food order lines whose fields validate every assignment.
//!
//! Run with:
//!   cargo run --example bulkfood --features logging -- --log-level debug
//!
//! `--log-level debug` (or FIELDGUARD_LOG_LEVEL=debug) shows rejected writes;
//! `--log-format json` (or FIELDGUARD_LOG_FORMAT=json) switches to structured output.

use clap::Parser;
use fieldguard::logging::LogArgs;
use fieldguard::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Bulk food line items with validated fields")]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

/// Fields shared by every line item, declared once.
struct LineItemFields {
    description: Validated<NonBlank>,
    weight: Validated<Quantity<f64>>,
    price: Validated<Quantity<f64>>,
}

impl LineItemFields {
    fn declare(registry: &mut FieldRegistry) -> Result<Self, ValidationError> {
        Ok(Self {
            description: Validated::non_blank(registry)?,
            weight: Validated::quantity(registry)?,
            price: Validated::quantity(registry)?,
        })
    }

    fn info(&self) -> Vec<(&'static str, FieldInfo)> {
        vec![
            ("description", self.description.info()),
            ("weight", self.weight.info()),
            ("price", self.price.info()),
        ]
    }
}

struct LineItem<'f> {
    fields: &'f LineItemFields,
    slots: Slots,
}

impl Owner for LineItem<'_> {
    fn slots(&self) -> &Slots {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut Slots {
        &mut self.slots
    }
}

impl<'f> LineItem<'f> {
    fn new(
        fields: &'f LineItemFields,
        description: &str,
        weight: f64,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let mut item = Self {
            fields,
            slots: Slots::new(),
        };
        fields.description.set(&mut item, description.to_owned())?;
        fields.weight.set(&mut item, weight)?;
        fields.price.set(&mut item, price)?;
        Ok(item)
    }

    fn subtotal(&self) -> Result<f64, ValidationError> {
        Ok(self.fields.weight.get(self)? * self.fields.price.get(self)?)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    cli.log.init();

    let mut registry = FieldRegistry::new();
    let fields = LineItemFields::declare(&mut registry)?;

    let mut declared = serde_json::Map::new();
    for (name, info) in fields.info() {
        declared.insert(name.to_owned(), serde_json::to_value(info)?);
    }
    println!("{}", serde_json::to_string_pretty(&declared)?);

    let mut raisins = LineItem::new(&fields, "  Golden raisins ", 10.0, 6.95)?;
    println!(
        "{:?}: subtotal {:.2}",
        fields.description.get(&raisins)?,
        raisins.subtotal()?
    );

    if let Err(err) = fields.weight.set(&mut raisins, 0.0) {
        println!("weight update rejected: {err}");
    }
    println!("weight is still {}", fields.weight.get(&raisins)?);

    match LineItem::new(&fields, "   ", 1.0, 1.0) {
        Ok(_) => println!("blank description accepted"),
        Err(err) => println!("blank description rejected: {err}"),
    }

    Ok(())
}
