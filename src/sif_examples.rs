//! Examples of multi-mode graphs to be used for testing and display.

use crate::graph::Graph;

pub const SIF_EXAMPLES: [(&str, &str); 9] = [
    ("chain",               "A\t0-to-1\tB\nB\t1-to-2\tC\n"),
    ("fan_out",             "r\t0-to-1\ta\nr\t0-to-1\tb\nr\t0-to-1\tc\n"),
    ("fan_in",              "a\t0-to-1\tz\nb\t0-to-1\tz\nc\t0-to-1\tz\n"),
    ("siblings",            "R\t0-to-1\tX\nR\t0-to-1\tY\nR\t0-to-1\tW\nY\t1-to-2\tZ\n"),
    ("skip_class",          "a\t0-to-2\tc\nb\t1-to-2\tc\na\t0-to-1\tb\n"),
    ("duplicate_lines",     "a\t0-to-1\tb\na\t0-to-1\tb\n\na\t0-to-1\tb\n"),
    (
        "two_roots_per_class",
        "p\t0-binds-1\tx\n\
         q\t0-binds-1\tx\n\
         q\t0-binds-1\ty\n\
         s\t1-makes-2\tm\n\
         x\t1-makes-2\tm\n\
         y\t1-makes-2\tn\n",
    ),
    (
        "three_mode",
        "g1@0\t0-to-1\tt1@1\n\
         g1@0\t0-to-1\tt2@1\n\
         g2@0\t0-to-1\tt2@1\n\
         g2@0\t0-to-1\tt3@1\n\
         t1@1\t1-to-2\tp1@2\n\
         t2@1\t1-to-2\tp1@2\n\
         t2@1\t1-to-2\tp2@2\n\
         t3@1\t1-to-2\tp3@2\n\
         g1@0\t0-to-2\tp3@2\n",
    ),
    (
        "wide_band",
        "r1\t0-to-1\ta\nr1\t0-to-1\tb\nr2\t0-to-1\tc\nr2\t0-to-1\td\n\
         a\t1-to-2\tk\nc\t1-to-2\tk\nb\t1-to-2\tl\nd\t1-to-2\tl\n\
         k\t2-to-3\tz\nl\t2-to-3\tz\n",
    ),
];

/// Return the text of the named example.
pub fn sif_example_str(title: &str) -> &'static str {
    for (sif_title, sif) in SIF_EXAMPLES {
        if title == sif_title {
            return sif;
        }
    }
    panic!("Could not find requested example: {title}")
}

/// Return the graph of the named example.
pub fn sif_example_graph(title: &str) -> Graph {
    match Graph::new_from_str(sif_example_str(title)) {
        Ok(graph) => graph,
        Err(err) => panic!("Example {title} does not load: {err}"),
    }
}
