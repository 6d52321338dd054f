pub mod cli_args;

/// Pin the current thread to the first core so that timings are not disturbed by migrations.
pub fn pin_to_first_core() {
    match core_affinity::get_core_ids().and_then(|core_ids| core_ids.first().copied()) {
        Some(core_id) => {
            core_affinity::set_for_current(core_id);
            report!("pinned_core", format!("{:?}", core_id));
        }
        None => println!("Could not determine core ids, running without pinning"),
    }
}
