use meiosim_sim::simulation::PairingMode;

pub fn list_modes() {
    println!("🧬 Pairing modes\n");
    for mode in PairingMode::ALL {
        let roles = mode.roles();
        println!("  • {mode}: {}", roles.banner);
        println!(
            "    - {}: {} × {}",
            roles.gametes[0], roles.parents[0], roles.parents[1]
        );
        println!(
            "    - {}: {} × {}",
            roles.gametes[1], roles.parents[2], roles.parents[3]
        );
    }
}
