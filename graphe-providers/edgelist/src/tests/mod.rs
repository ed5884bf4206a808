pub(crate) use super::{EdgeListError, load_path, read_edge_list, save_path, write_edge_list};
