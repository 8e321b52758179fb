// arith: parse an arithmetic expression, print its tree, and evaluate it.

use anyhow::{bail, Result};

use arith::parse::Parser;

fn main() -> Result<()> {
    // The expression may arrive as one quoted argument or split into several
    // words by the shell; rejoin it either way.
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "arith".to_string());
        bail!("No expression provided.\n\nUsage: {} '<expression>'\n\nExample:\n  {} '3 + 5 * (2 - 8)'", program, program);
    }

    let input = args.join(" ");

    let expr = Parser::new(&input)?.parse()?;

    println!("{}", expr.render());
    println!("Result: {}", expr.reduce()?);

    Ok(())
}
