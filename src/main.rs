//! rexlower - lowers sample planner expressions and prints the typed IR

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use log::info;
use rexlower::logical::{Decimal, LogicalType, RexNode};
use rexlower::lowering::{lower_exprs, FunctionMappings};
use rexlower::typed::TypedExpr;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Function-call notation
    Text,
    /// Rust debug representation of the tree
    Debug,
    /// Hex of the bincode encoding handed to the engine
    Bincode,
}

/// rexlower - expression lowering demo
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input column names, in schema order
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "id,name,price,active,address"
    )]
    columns: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mappings = FunctionMappings::default();
    info!(
        "Lowering sample expressions over columns [{}] with {} operator mappings",
        args.columns.join(", "),
        mappings.len()
    );

    let nodes = sample_expressions()?;
    let lowered =
        lower_exprs(&nodes, &args.columns, &mappings).context("Failed to lower expressions")?;

    for (node, expr) in nodes.iter().zip(&lowered) {
        match args.format {
            OutputFormat::Text => println!("{} : {}", expr, expr.data_type()),
            OutputFormat::Debug => {
                println!(
                    "// {} of {:?}, constants [{}]",
                    node.kind(),
                    node.data_type(),
                    constant_tags(expr).join(", ")
                );
                println!("{:#?}", expr);
            }
            OutputFormat::Bincode => {
                let bytes = expr
                    .to_bytes()
                    .with_context(|| format!("Failed to encode {} expression", node.kind()))?;
                let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
                println!("{}", hex);
            }
        }
    }

    Ok(())
}

/// Tag names of every constant in `expr`, in tree order
fn constant_tags(expr: &TypedExpr) -> Vec<&'static str> {
    match expr {
        TypedExpr::Constant { value, .. } => vec![value.type_name()],
        TypedExpr::Call { inputs, .. } => inputs.iter().flat_map(constant_tags).collect(),
        TypedExpr::FieldAccess { .. } => Vec::new(),
    }
}

/// Builds filter and projection expressions over the default schema
/// `(id BIGINT, name VARCHAR, price DECIMAL(10, 2), active BOOLEAN,
/// address ROW(city VARCHAR, zip INTEGER))`.
fn sample_expressions() -> Result<Vec<RexNode>> {
    let price_type = LogicalType::decimal(10, 2);
    let address_type = LogicalType::row([
        ("city", LogicalType::varchar()),
        ("zip", LogicalType::Integer),
    ]);
    let markup: Decimal = "1.10".parse().context("Invalid sample decimal")?;

    // price * 1.10 > 100.00
    let expensive = RexNode::call(
        ">",
        vec![
            RexNode::call(
                "*",
                vec![
                    RexNode::input_ref(2, price_type.clone()),
                    RexNode::literal(markup, LogicalType::decimal(3, 2)),
                ],
                LogicalType::decimal(14, 4),
            ),
            RexNode::literal(
                "100.00".parse::<Decimal>().context("Invalid sample decimal")?,
                price_type,
            ),
        ],
        LogicalType::Boolean,
    );

    // name LIKE 'A%' AND active
    let active_a = RexNode::call(
        "AND",
        vec![
            RexNode::call(
                "LIKE",
                vec![
                    RexNode::input_ref(1, LogicalType::varchar()),
                    RexNode::literal("A%", LogicalType::varchar()),
                ],
                LogicalType::Boolean,
            ),
            RexNode::input_ref(3, LogicalType::Boolean),
        ],
        LogicalType::Boolean,
    );

    // address.city
    let city = RexNode::field_access(
        RexNode::input_ref(4, address_type),
        "city",
        LogicalType::varchar(),
    );

    // id + 1
    let next_id = RexNode::call(
        "+",
        vec![
            RexNode::input_ref(0, LogicalType::BigInt),
            RexNode::literal(1i64, LogicalType::BigInt),
        ],
        LogicalType::BigInt,
    );

    Ok(vec![expensive, active_a, city, next_id])
}
