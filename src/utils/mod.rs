// Utility module - graph, coordinate lookup and network loading

pub mod coordinate_map;
pub mod distance_table;
pub mod init_map;
pub mod road_network;
