pub mod alias;
pub mod builder;
pub mod catalog;
pub mod encode;
pub mod expand;
pub mod pinyin;
pub mod scheme;
pub mod settings;
pub mod table;
