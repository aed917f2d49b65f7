use anyhow::Result;

use uriql_edm::ProtocolVersion;
use uriql_lexer::{tokens::TokenKind, ExpressionLexer};
use uriql_literal::LiteralParser;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("err: no expression provided");
        eprintln!("usage: uriql \"Price gt 3.5M and Name eq 'it''s'\"");
        std::process::exit(1);
    }
    let expression = args.join(" ");

    println!("Tokenizing Expression");

    let mut lexer = ExpressionLexer::new(&expression)?;
    let literals = LiteralParser::new(ProtocolVersion::V3);

    loop {
        let token = lexer.current_token().clone();
        if token.kind == TokenKind::End {
            break;
        }

        let kind = token.kind.to_string();
        if token.kind.is_literal() {
            let value = literals.parse_at(&expression, &token.text, token.position, None)?;
            println!("{:>4}  {kind:<22} {:<28} => {value:?}", token.position, token.text);
        } else {
            println!("{:>4}  {kind:<22} {}", token.position, token.text);
        }

        lexer.next_token()?;
    }

    println!("Done");

    Ok(())
}
