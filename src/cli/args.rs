//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Tree(TreeArgs),
    Component(ComponentArgs),
}

#[derive(Debug, Clone, Default)]
pub struct TreeArgs {
    pub report_dir: String,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct ComponentArgs {
    pub report_dir: String,
    pub component_ref: i32,
    pub source: bool,
    pub json: bool,
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "tree" => Command::Tree(parse_tree_args(&args[2..])?),
        "component" => Command::Component(parse_component_args(&args[2..])?),
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

fn parse_tree_args(args: &[String]) -> Result<TreeArgs, String> {
    let mut tree_args = TreeArgs::default();

    for arg in args {
        match arg.as_str() {
            "--json" => tree_args.json = true,
            arg if !arg.starts_with("--") => {
                if tree_args.report_dir.is_empty() {
                    tree_args.report_dir = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {arg}")),
        }
    }

    if tree_args.report_dir.is_empty() {
        return Err("Missing required argument: REPORT_DIR".to_string());
    }

    Ok(tree_args)
}

fn parse_component_args(args: &[String]) -> Result<ComponentArgs, String> {
    let mut report_dir = String::new();
    let mut component_ref = None;
    let mut source = false;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--source" => source = true,
            "--json" => json = true,
            arg if !arg.starts_with("--") => {
                if report_dir.is_empty() {
                    report_dir = arg.to_string();
                } else if component_ref.is_none() {
                    let parsed: i32 = arg
                        .parse()
                        .map_err(|_| format!("Invalid component reference: {arg}"))?;
                    if parsed <= 0 {
                        return Err("Component reference must be a positive integer".to_string());
                    }
                    component_ref = Some(parsed);
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {arg}")),
        }
    }

    if report_dir.is_empty() {
        return Err("Missing required argument: REPORT_DIR".to_string());
    }
    let component_ref = component_ref.ok_or_else(|| "Missing required argument: REF".to_string())?;

    Ok(ComponentArgs {
        report_dir,
        component_ref,
        source,
        json,
    })
}
