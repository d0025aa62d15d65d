//! CLI argument parsing and file format tests.
//!
//! The CLI is a binary crate, so the clap structures are mirrored here and
//! checked with `try_parse_from`; file round trips go through the library
//! crates the commands call.

// ============================================================================
// clap parsing
// ============================================================================

mod parse_tests {
    use clap::{Parser, Subcommand};

    #[derive(Parser, Debug)]
    #[command(name = "linsynth")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[arg(long, global = true)]
        config: Option<String>,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand, Debug)]
    enum TestCommands {
        Generate {
            #[arg(short)]
            n: usize,
            #[arg(short, long, default_value = "0")]
            seed: u64,
            #[arg(short, long)]
            output: Option<String>,
        },
        Synth {
            #[arg(short, conflicts_with = "input")]
            n: Option<usize>,
            #[arg(short, long, default_value = "0")]
            seed: u64,
            #[arg(short, long)]
            input: Option<String>,
            #[arg(short, long)]
            method: Option<String>,
            #[arg(long)]
            section_size: Option<usize>,
            #[arg(long)]
            verify: bool,
            #[arg(short, long)]
            output: Option<String>,
        },
        Compare {
            #[arg(long, value_delimiter = ',', default_value = "8,16,32,64")]
            sizes: Vec<usize>,
            #[arg(long, default_value = "4")]
            seeds: u64,
            #[arg(long)]
            json: bool,
        },
        Version,
    }

    #[test]
    fn test_generate_args() {
        let cli = TestCli::try_parse_from(["linsynth", "generate", "-n", "8", "--seed", "3"]).unwrap();
        match cli.command {
            TestCommands::Generate { n, seed, output } => {
                assert_eq!(n, 8);
                assert_eq!(seed, 3);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_generate_requires_n() {
        assert!(TestCli::try_parse_from(["linsynth", "generate"]).is_err());
    }

    #[test]
    fn test_generate_rejects_negative_n() {
        assert!(TestCli::try_parse_from(["linsynth", "generate", "-n", "-4"]).is_err());
    }

    #[test]
    fn test_synth_defaults() {
        let cli = TestCli::try_parse_from(["linsynth", "synth", "-n", "16"]).unwrap();
        match cli.command {
            TestCommands::Synth {
                n,
                seed,
                input,
                method,
                section_size,
                verify,
                output,
            } => {
                assert_eq!(n, Some(16));
                assert_eq!(seed, 0);
                assert!(input.is_none());
                assert!(method.is_none());
                assert!(section_size.is_none());
                assert!(!verify);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_synth_all_flags() {
        let cli = TestCli::try_parse_from([
            "linsynth",
            "synth",
            "--input",
            "m.json",
            "--method",
            "kms",
            "--section-size",
            "3",
            "--verify",
            "-o",
            "c.json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Synth {
                input,
                method,
                section_size,
                verify,
                output,
                ..
            } => {
                assert_eq!(input.as_deref(), Some("m.json"));
                assert_eq!(method.as_deref(), Some("kms"));
                assert_eq!(section_size, Some(3));
                assert!(verify);
                assert_eq!(output.as_deref(), Some("c.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_synth_input_conflicts_with_n() {
        assert!(
            TestCli::try_parse_from(["linsynth", "synth", "-n", "4", "--input", "m.json"]).is_err()
        );
    }

    #[test]
    fn test_compare_sizes_list() {
        let cli = TestCli::try_parse_from([
            "linsynth", "compare", "--sizes", "4,12,20", "--seeds", "2", "--json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Compare { sizes, seeds, json } => {
                assert_eq!(sizes, vec![4, 12, 20]);
                assert_eq!(seeds, 2);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_compare_defaults() {
        let cli = TestCli::try_parse_from(["linsynth", "compare"]).unwrap();
        match cli.command {
            TestCommands::Compare { sizes, seeds, json } => {
                assert_eq!(sizes, vec![8, 16, 32, 64]);
                assert_eq!(seeds, 4);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            TestCli::try_parse_from(["linsynth", "version", "-vv", "--config", "c.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("c.yaml"));
        assert!(matches!(cli.command, TestCommands::Version));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(TestCli::try_parse_from(["linsynth", "optimize"]).is_err());
    }
}

// ============================================================================
// file formats
// ============================================================================

mod file_tests {
    use std::fs;

    use linsynth_gf2::{BinaryMatrix, random_invertible_matrix};
    use linsynth_ir::LinearCircuit;
    use linsynth_synth::{SynthesisMethod, Synthesizer, verify_circuit};

    #[test]
    fn test_matrix_json_layout() {
        let matrix = BinaryMatrix::from_bits(&[&[1, 1], &[0, 1]]).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[1,1],[0,1]]");
    }

    #[test]
    fn test_synth_from_matrix_file() {
        let dir = tempfile::tempdir().unwrap();
        let matrix_path = dir.path().join("matrix.json");
        let circuit_path = dir.path().join("circuit.json");

        let matrix = random_invertible_matrix(10, 5).unwrap();
        fs::write(&matrix_path, serde_json::to_string_pretty(&matrix).unwrap()).unwrap();

        let loaded: BinaryMatrix =
            serde_json::from_str(&fs::read_to_string(&matrix_path).unwrap()).unwrap();
        for method in SynthesisMethod::ALL {
            let circuit = method.synthesizer().synthesize(&loaded).unwrap();
            fs::write(&circuit_path, serde_json::to_string(&circuit).unwrap()).unwrap();

            let reloaded: LinearCircuit =
                serde_json::from_str(&fs::read_to_string(&circuit_path).unwrap()).unwrap();
            assert_eq!(reloaded, circuit);
            verify_circuit(&matrix, &reloaded).unwrap();
        }
    }

    #[test]
    fn test_circuit_json_rejects_out_of_range_qubit() {
        let json = r#"{"num_qubits":2,"gates":[[0,5]]}"#;
        assert!(serde_json::from_str::<LinearCircuit>(json).is_err());
    }

    #[test]
    fn test_method_names() {
        for method in SynthesisMethod::ALL {
            assert_eq!(method.as_str().parse::<SynthesisMethod>().unwrap(), method);
        }
        assert!("bogus".parse::<SynthesisMethod>().is_err());
    }
}
