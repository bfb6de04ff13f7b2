//! Command-line entry point: `learn | evaluate | classify` over a CSV
//! dataset and a binary model file, mirroring the flag surface of
//! the reference `RIPPERk` CLI.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ripperk::{dataset, io, learner};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() == 1 && (args[0] == "-h" || args[0] == "--help") {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("--mode:");
    println!("\tlearn - train and output the model. Paths to the dataset CSV and the model output file are required");
    println!("\tevaluate - check the accuracy of the model. Paths to the model and the test dataset CSV are required");
    println!("\tclassify - classify a dataset. Paths to the model and the dataset CSV are required");
    println!("--dataset - path to the CSV file holding the data instances. Should be formatted appropriately");
    println!("--model - path to the binary file storing the model. The model will be created in learn mode; evaluate and classify modes require an existing, valid model file");
    println!("--model-txt - path to the text file holding the model in human-readable format. Non-mandatory");
    println!("--ratio - ratio of grow to prune dataset. Non-mandatory. Default is 2/3");
    println!("--k - number of optimization passes performed. Non-mandatory. Default is 2");
}

/// Parse `--flag value` pairs. Every flag here takes exactly one value.
fn parse_flags(args: &[String]) -> Result<HashMap<String, String>, String> {
    let mut flags = HashMap::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if !arg.starts_with("--") {
            return Err(format!("unexpected argument '{arg}', flags must start with --"));
        }
        let value = iter.next().ok_or_else(|| format!("{arg} expects a value"))?;
        flags.insert(arg.clone(), value.clone());
    }
    Ok(flags)
}

/// Resolve a relative path against the running executable's directory,
/// matching `original_source/main.cpp`'s exe-relative resolution.
fn resolve_path(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_relative() {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(path);
            }
        }
    }
    path.to_path_buf()
}

fn run(args: &[String]) -> Result<(), String> {
    let flags = parse_flags(args)?;

    let mode = flags.get("--mode").ok_or("mandatory parameter --mode is missing")?;
    if mode != "learn" && mode != "evaluate" && mode != "classify" {
        return Err(format!("incorrect mode '{mode}' provided"));
    }

    let dataset_path = flags.get("--dataset").ok_or("mandatory parameter --dataset is missing")?;
    let dataset_path = resolve_path(dataset_path);

    let model_path = flags.get("--model").ok_or("mandatory parameter --model is missing")?;
    let model_path = resolve_path(model_path);

    let model_txt_path = match flags.get("--model-txt") {
        Some(raw) => Some(resolve_path(raw)),
        None => {
            println!("Path to the human-readable model is not provided.");
            println!("If you wish to generate a human-readable model, please provide a valid path with the --model-txt parameter.");
            None
        }
    };

    let ratio = match flags.get("--ratio") {
        Some(raw) => raw.parse::<f64>().map_err(|_| format!("invalid --ratio value '{raw}'"))?,
        None => {
            println!("Using default pruning ratio of 2/3");
            2.0 / 3.0
        }
    };

    let k = match flags.get("--k") {
        Some(raw) => raw.parse::<usize>().map_err(|_| format!("invalid --k value '{raw}'"))?,
        None => {
            println!("Using default k of 2");
            2
        }
    };

    match mode.as_str() {
        "learn" => run_learn(&dataset_path, &model_path, model_txt_path.as_deref(), ratio, k),
        "evaluate" => run_evaluate(&dataset_path, &model_path),
        "classify" => run_classify(&dataset_path, &model_path),
        _ => unreachable!("mode already validated"),
    }
    .map_err(|err| err.to_string())
}

fn run_learn(dataset_path: &Path, model_path: &Path, model_txt_path: Option<&Path>, ratio: f64, k: usize) -> ripperk::Result<()> {
    let instances = dataset::csv::read(dataset_path)?;
    let model = learner::fit(&instances, ratio, k)?;

    io::binary::write(&model, model_path)?;
    if let Some(txt_path) = model_txt_path {
        io::text::write(&model, txt_path)?;
    }

    println!("Model trained on {} instances and written to {}", instances.len(), model_path.display());
    Ok(())
}

fn run_evaluate(dataset_path: &Path, model_path: &Path) -> ripperk::Result<()> {
    let instances = dataset::csv::read(dataset_path)?;
    let catalog = std::rc::Rc::new(ripperk::catalog::AttributeCatalog::from_dataset(&instances));
    let model = io::binary::read(model_path, &catalog)?;

    let total = instances.len();
    let correct = instances.iter().filter(|i| model.classify(i) == i.class).count();
    let incorrect = total - correct;
    let success_rate = if total == 0 { 0.0 } else { 100.0 * correct as f64 / total as f64 };

    println!("Instances analyzed: {total}");
    println!("Correct: {correct}");
    println!("Incorrect: {incorrect}");
    println!("Success rate: {success_rate:.2}%");
    Ok(())
}

fn run_classify(dataset_path: &Path, model_path: &Path) -> ripperk::Result<()> {
    let instances = dataset::csv::read(dataset_path)?;
    let catalog = std::rc::Rc::new(ripperk::catalog::AttributeCatalog::from_dataset(&instances));
    let model = io::binary::read(model_path, &catalog)?;

    for (i, instance) in instances.iter().enumerate() {
        println!("{i}: {}", model.classify(instance));
    }
    Ok(())
}
