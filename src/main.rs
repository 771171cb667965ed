use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use dotpath::io::{dot, loader};
use dotpath::{Dijkstra, Error, NodeId, Result};

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 && args.len() != 6 {
        eprintln!("invalid number of parameters");
        eprintln!(
            "usage: {} <nodes-file> <edges-file> <source-id> <dest-id> [output-file]",
            args.first().map(String::as_str).unwrap_or("dotpath")
        );
        process::exit(1);
    }

    let source_id = parse_id_arg(&args[3], "source");
    let dest_id = parse_id_arg(&args[4], "destination");
    let output_path = args.get(5).map(String::as_str);

    if let Err(e) = run(&args[1], &args[2], source_id, dest_id, output_path) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn parse_id_arg(arg: &str, what: &str) -> NodeId {
    match arg.trim().parse() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("invalid {} node id: {}", what, arg);
            process::exit(1);
        }
    }
}

fn run(
    nodes_path: &str,
    edges_path: &str,
    source_id: NodeId,
    dest_id: NodeId,
    output_path: Option<&str>,
) -> Result<()> {
    let mut graph = loader::read_graph(nodes_path, edges_path)?;

    // The destination must exist before the search runs; the source is
    // checked by the engine itself.
    let target = graph
        .get(dest_id)
        .ok_or(Error::InvalidDestination(dest_id))?;

    Dijkstra::new().shortest_path(&mut graph, source_id, Some(target))?;

    if graph.node(target).distance() == u32::MAX {
        return Err(Error::NoPath {
            source: source_id,
            target: dest_id,
        });
    }

    // The output file is only created once a path is known to exist.
    match output_path {
        Some(path) => {
            let as_output_error = |source: io::Error| Error::OutputFile {
                path: path.to_owned(),
                source,
            };
            let file = File::create(path).map_err(as_output_error)?;
            let mut out = BufWriter::new(file);
            dot::write_path(&mut out, &graph, source_id, target).map_err(as_output_error)?;
            out.flush().map_err(as_output_error)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            dot::write_path(&mut out, &graph, source_id, target).map_err(|source| {
                Error::OutputFile {
                    path: "<stdout>".to_owned(),
                    source,
                }
            })?;
        }
    }
    Ok(())
}
