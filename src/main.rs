/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{bail, Context, Result};
use dsi_progress_logger::prelude::*;
use scc_adequacy::prelude::*;
use scc_adequacy::threads;

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut args = std::env::args().skip(1);
    let operation = args.next().unwrap_or_else(|| "single-pass".to_owned());

    let graph = read_graph(std::io::stdin().lock())?;
    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Read graph with {} vertices and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    ));

    let adequate = match operation.as_str() {
        "single-pass" => sccs::single_pass(&graph, &mut main_pl).is_adequate(),
        "kosaraju" => sccs::kosaraju(&graph, &mut main_pl).is_adequate(),
        "brute" => {
            let thread_pool = match args.next() {
                Some(arg) => {
                    let num_threads = arg
                        .parse::<usize>()
                        .with_context(|| format!("Invalid number of threads {arg:?}"))?;
                    threads![num_threads]
                }
                None => threads![],
            };
            let adequate = reachability::all_reachable(&graph, &thread_pool, &mut main_pl);
            if !adequate {
                for (node, missing) in reachability::unreachable_pairs(&graph, &thread_pool) {
                    let missing = missing
                        .into_iter()
                        .map(|node| graph.name(node))
                        .collect::<Vec<_>>();
                    main_pl.info(format_args!(
                        "{} does not reach {:?}",
                        graph.name(node),
                        missing
                    ));
                }
            }
            adequate
        }
        _ => bail!("Unknown operation {operation:?} (expected single-pass, kosaraju or brute)"),
    };

    if adequate {
        println!("Adequado.");
    } else {
        println!("Inadequado.");
    }

    Ok(())
}
