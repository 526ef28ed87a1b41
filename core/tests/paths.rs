use runlog_core::{
    path::{file_name_of, run_file_path, sanitize_strategy_folder, summary_path},
    types::Platform,
};

#[test]
fn sanitizes_strategy_folder_and_applies_sacrifice_suffix() {
    let path = run_file_path(Platform::Pc, 1, 6, true, "My/Strategy");
    assert_eq!(path, "Saved_Runs/My_Strategy/pc/galaxy1/pc_galaxy1_dimboost6_sac.txt");
}

#[test]
fn no_sacrifice_suffix_below_dimboost_five() {
    let path = run_file_path(Platform::Mobile, 0, 4, true, "Optimized");
    assert_eq!(path, "Saved_Runs/Optimized/mobile/galaxy0/mobile_galaxy0_dimboost4.txt");
}

/// Dimboost 5 is the first that carries the `_sac` variant.
#[test]
fn sacrifice_suffix_starts_at_dimboost_five() {
    assert_eq!(
        run_file_path(Platform::Pc, 0, 5, true, "Optimized"),
        "Saved_Runs/Optimized/pc/galaxy0/pc_galaxy0_dimboost5_sac.txt"
    );
    assert_eq!(
        run_file_path(Platform::Pc, 0, 5, false, "Optimized"),
        "Saved_Runs/Optimized/pc/galaxy0/pc_galaxy0_dimboost5.txt"
    );
}

#[test]
fn no_sacrifice_suffix_when_flag_is_off() {
    let path = run_file_path(Platform::Pc, 2, 16, false, "Optimized");
    assert_eq!(path, "Saved_Runs/Optimized/pc/galaxy2/pc_galaxy2_dimboost16.txt");
}

#[test]
fn every_reserved_character_is_replaced() {
    assert_eq!(sanitize_strategy_folder(r#"a<b>c:d"e/f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
    assert_eq!(sanitize_strategy_folder("T12345678"), "T12345678");
}

#[test]
fn summary_and_download_names() {
    assert_eq!(summary_path("A?B"), "Saved_Runs/A_B/summary.txt");
    assert_eq!(
        file_name_of("Saved_Runs/Optimized/pc/galaxy0/pc_galaxy0_dimboost3.txt"),
        "pc_galaxy0_dimboost3.txt"
    );
}
