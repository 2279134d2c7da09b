mod blog;
mod category;
mod comment;
mod message;
mod region;
mod site;
mod user;
mod viewing;
