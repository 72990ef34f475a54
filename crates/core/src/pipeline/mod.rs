pub mod generate_cues_use_case;
