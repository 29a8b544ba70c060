mod config_files;
mod end_to_end;
