use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use chainlint::Linter;

/// Run the interactive session: one chain expression per line.
pub fn run(linter: &Linter) -> Result<()> {
    println!(
        "chainlint {} ({} frontend) -- :help for commands, :quit to exit",
        chainlint::VERSION,
        linter.frontend().name()
    );

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("chainlint> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line)?;

                match line {
                    ":quit" | ":q" => break,
                    ":help" => {
                        println!(":help        show this help");
                        println!(":rules       list active rules");
                        println!(":quit        exit the session");
                        println!("anything else is linted as a chain expression");
                    }
                    ":rules" => {
                        for name in linter.active_rules() {
                            println!("{}", name);
                        }
                    }
                    chain => match linter.lint_expr(chain) {
                        Ok(report) if report.is_clean() => println!("ok"),
                        Ok(report) => {
                            for diag in &report.diagnostics {
                                println!("{}", linter.frontend().format_diagnostic(diag));
                            }
                        }
                        Err(e) => println!("{}", e),
                    },
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
